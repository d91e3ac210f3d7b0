//! Import workflow: live lineups in, reviewable proposal file out.

use std::path::{Path, PathBuf};

use chanmap_client::LiveTvBackend;
use chanmap_interchange::{
    PROVIDER_CHANNEL_LIST_FILE, write_mapping_file, write_provider_channel_list,
};
use chanmap_match::best_match;
use chanmap_model::{ChannelMappingOptions, MappingProposal};
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::options::{ImportOptions, ProviderIdSource};
use crate::select::choose_provider;
use crate::shell::Shell;

const SUMMARY_TITLE: &str = "EPG Guide";
const RESULT_TITLE: &str = "Matching result";
const SAVE_TITLE: &str = "Create matches CSV";

/// What a completed import produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub provider_id: String,
    pub tuner_channels: usize,
    pub provider_channels: usize,
    /// Entries in the provider's existing `Mappings` list.
    pub existing_mappings: usize,
    /// Tuner channels the server already had a provider channel for.
    pub mapped_tuners: usize,
    /// Tuner channels that passed the name filter.
    pub considered: usize,
    /// Rows written to the mapping file.
    pub proposals: usize,
    pub listing_path: PathBuf,
    pub mapping_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The operator backed out; nothing was written.
    Cancelled,
    Written(ImportReport),
}

/// Run the import workflow.
///
/// Fetches the selected provider's lineups, writes the full provider channel
/// list to [`PROVIDER_CHANNEL_LIST_FILE`] and the accepted matches to a file
/// named by the operator. Both files land in
/// [`ImportOptions::output_dir`].
pub fn run_import<B, S>(backend: &B, shell: &mut S, options: &ImportOptions) -> Result<ImportOutcome>
where
    B: LiveTvBackend + ?Sized,
    S: Shell + ?Sized,
{
    let span = info_span!("import");
    let _guard = span.enter();

    let Some(provider_id) =
        choose_provider(backend, shell, "Which EPG guide do you want to match against?")?
    else {
        return Ok(ImportOutcome::Cancelled);
    };

    let lineups = backend.channel_mapping_options(&provider_id)?;
    let existing_mappings = lineups.mappings.len();
    let mapped_tuners = lineups.mapped_tuner_count();
    info!(
        provider = %lineups.provider_name,
        tuner_channels = lineups.tuner_channels.len(),
        provider_channels = lineups.provider_channels.len(),
        existing_mappings,
        mapped_tuners,
        "fetched channel lineups"
    );
    shell.show_message(
        SUMMARY_TITLE,
        &format!(
            "We pulled {existing_mappings} current mappings. {} available tuner channels and {} EPG provider channels.",
            lineups.tuner_channels.len(),
            lineups.provider_channels.len()
        ),
    )?;

    let considered = lineups
        .tuner_channels
        .iter()
        .filter(|channel| channel.name.contains(options.name_filter.as_str()))
        .count();
    let proposals = propose_mappings(&lineups, options);
    if options.provider_id_source == ProviderIdSource::MatchedName && !proposals.is_empty() {
        warn!(
            "ProviderChannelId column holds matched channel names; export sends them as provider channel ids"
        );
    }
    shell.show_message(
        RESULT_TITLE,
        &format!(
            "We matched {} of {considered} tuner channels above a score of {}.",
            proposals.len(),
            options.threshold
        ),
    )?;

    let listing_path = options.output_dir.join(PROVIDER_CHANNEL_LIST_FILE);
    let Some(mapping_path) = request_mapping_path(shell, options, &listing_path)? else {
        info!("import cancelled at file name prompt");
        return Ok(ImportOutcome::Cancelled);
    };

    write_provider_channel_list(&listing_path, &lineups.provider_channels)?;
    let written = write_mapping_file(&mapping_path, &proposals)?;
    info!(
        listing = %listing_path.display(),
        mapping = %mapping_path.display(),
        proposals = written,
        "import complete"
    );

    Ok(ImportOutcome::Written(ImportReport {
        provider_id,
        tuner_channels: lineups.tuner_channels.len(),
        provider_channels: lineups.provider_channels.len(),
        existing_mappings,
        mapped_tuners,
        considered,
        proposals: written,
        listing_path,
        mapping_path,
    }))
}

/// Ask for the mapping file name until it names something other than the
/// provider channel listing. `None` means the operator cancelled.
fn request_mapping_path<S>(
    shell: &mut S,
    options: &ImportOptions,
    listing_path: &Path,
) -> Result<Option<PathBuf>>
where
    S: Shell + ?Sized,
{
    loop {
        let Some(file_name) = shell
            .request_text(SAVE_TITLE, "Save to CSV file name:")?
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
        else {
            return Ok(None);
        };
        let mapping_path = options.output_dir.join(&file_name);
        if mapping_path.as_path() == listing_path {
            warn!(file = %file_name, "mapping file name collides with the provider channel list");
            shell.show_message(
                SAVE_TITLE,
                &format!("{PROVIDER_CHANNEL_LIST_FILE} holds the provider channel list. Choose another name."),
            )?;
            continue;
        }
        return Ok(Some(mapping_path));
    }
}

/// Match every filtered tuner channel against the provider lineup.
pub fn propose_mappings(
    lineups: &ChannelMappingOptions,
    options: &ImportOptions,
) -> Vec<MappingProposal> {
    propose_mappings_with(lineups, options, |query, names| {
        best_match(query, names).map(|found| (found.index, found.score))
    })
}

/// [`propose_mappings`] with a caller-supplied scorer.
///
/// `matcher` receives a tuner channel name and the provider channel names and
/// returns the index and score of the best candidate. It is never called when
/// the provider lineup is empty.
pub fn propose_mappings_with<F>(
    lineups: &ChannelMappingOptions,
    options: &ImportOptions,
    mut matcher: F,
) -> Vec<MappingProposal>
where
    F: FnMut(&str, &[&str]) -> Option<(usize, u8)>,
{
    if lineups.provider_channels.is_empty() {
        debug!("provider lineup is empty, skipping matching");
        return Vec::new();
    }
    let names = lineups.provider_channel_names();

    let mut proposals = Vec::new();
    for tuner in lineups
        .tuner_channels
        .iter()
        .filter(|channel| channel.name.contains(options.name_filter.as_str()))
    {
        let Some((index, score)) = matcher(&tuner.name, &names) else {
            continue;
        };
        let Some(provider) = lineups.provider_channels.get(index) else {
            continue;
        };
        if score <= options.threshold {
            debug!(tuner = %tuner.name, best = %provider.name, score, "below threshold");
            continue;
        }
        info!(
            tuner = %tuner.name,
            provider = %provider.name,
            score,
            "matched tuner channel"
        );

        let provider_channel_id = match options.provider_id_source {
            ProviderIdSource::MatchedName => provider.name.clone(),
            ProviderIdSource::LineupId => provider.id.clone(),
        };
        proposals.push(MappingProposal {
            tuner_channel_id: tuner.id.clone(),
            tuner_channel_name: tuner.name.clone(),
            provider_channel_id,
            provider_channel_name: provider.name.clone(),
            score,
        });
    }
    proposals
}
