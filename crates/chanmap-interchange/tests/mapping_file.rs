//! Integration tests for mapping file round trips.

use std::fs;

use chanmap_interchange::{MappingReader, write_mapping_file};
use chanmap_model::MappingProposal;

fn proposal(id: &str, name: &str, provider_id: &str, provider_name: &str) -> MappingProposal {
    MappingProposal {
        tuner_channel_id: id.to_string(),
        tuner_channel_name: name.to_string(),
        provider_channel_id: provider_id.to_string(),
        provider_channel_name: provider_name.to_string(),
        score: 90,
    }
}

#[test]
fn written_rows_read_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mappings.csv");
    let proposals = vec![
        proposal("t1", "ESPN (HD)", "ESPN HD", "ESPN HD"),
        proposal("t2", "ESPN2 East", "ESPN2", "ESPN2"),
        proposal("t3", "NESN; Plus", "NESN Plus", "NESN Plus"),
    ];

    let written = write_mapping_file(&path, &proposals).unwrap();
    assert_eq!(written, 3);

    let rows: Vec<_> = MappingReader::open(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(rows.len(), proposals.len());
    for (row, proposal) in rows.iter().zip(&proposals) {
        let expected: Vec<String> = proposal.columns().iter().map(|c| c.to_string()).collect();
        assert_eq!(row.columns, expected);
    }
}

#[test]
fn file_layout_matches_dialect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mappings.csv");
    let proposals = vec![
        proposal("t1", "ESPN (HD)", "ESPN HD", "ESPN HD"),
        proposal("t2", "ESPN; Alt", "C:\\feeds", "ESPN Alt"),
    ];

    write_mapping_file(&path, &proposals).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(content.matches("\r\n").count(), 3);
    assert_eq!(content.matches('\n').count(), 3);
    insta::assert_snapshot!(content.replace("\r\n", "\n"), @r"
    Id;Name;ProviderChannelId;ProviderChannelName
    t1;ESPN (HD);ESPN HD;ESPN HD
    t2;\ESPN; Alt\;\C:\\feeds\;ESPN Alt
    ");
}

#[test]
fn zero_proposals_write_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let written = write_mapping_file(&path, &[]).unwrap();

    assert_eq!(written, 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Id;Name;ProviderChannelId;ProviderChannelName\r\n"
    );
    assert_eq!(MappingReader::open(&path).unwrap().count(), 0);
}

#[test]
fn rewriting_truncates_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mappings.csv");

    write_mapping_file(
        &path,
        &[
            proposal("t1", "A", "a", "a"),
            proposal("t2", "B", "b", "b"),
        ],
    )
    .unwrap();
    write_mapping_file(&path, &[proposal("t9", "Z", "z", "z")]).unwrap();

    let rows: Vec<_> = MappingReader::open(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tuner_channel_id(), "t9");
}
