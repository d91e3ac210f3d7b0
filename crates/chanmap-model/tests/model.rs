//! Tests for chanmap-model decoding.

use chanmap_model::{
    ChannelMappingOptions, LiveTvConfiguration, MappingProposal, SetChannelMapping,
};

#[test]
fn decodes_listing_providers() {
    let json = r#"{
        "EnableMovieProviders": true,
        "ListingProviders": [
            {
                "Id": "a1b2",
                "Path": "/config/epg/guide.xml",
                "Type": "xmltv",
                "EnableAllTuners": true,
                "ChannelMappings": [{ "Name": "ESPN", "Value": "espn.us" }]
            },
            { "Id": "c3d4", "Path": null, "Type": "schedulesdirect", "ChannelMappings": null }
        ]
    }"#;

    let config: LiveTvConfiguration = serde_json::from_str(json).expect("decode config");
    assert_eq!(config.listing_providers.len(), 2);

    let first = &config.listing_providers[0];
    assert_eq!(first.id, "a1b2");
    assert_eq!(first.provider_type.as_deref(), Some("xmltv"));
    assert_eq!(first.channel_mappings[0].name, "ESPN");
    assert_eq!(first.channel_mappings[0].value, "espn.us");

    let second = &config.listing_providers[1];
    assert!(second.channel_mappings.is_empty());
    assert_eq!(second.label(), "c3d4");
}

#[test]
fn missing_provider_list_is_empty() {
    let config: LiveTvConfiguration = serde_json::from_str("{}").expect("decode config");
    assert!(config.listing_providers.is_empty());

    let config: LiveTvConfiguration =
        serde_json::from_str(r#"{"ListingProviders": null}"#).expect("decode config");
    assert!(config.listing_providers.is_empty());
}

#[test]
fn decodes_mapping_options() {
    let json = r#"{
        "Mappings": [{ "Name": "7.1", "Value": "kabc" }],
        "ProviderChannels": [
            { "Id": "espn.us", "Name": "ESPN HD" },
            { "Id": "cnn.us", "Name": "CNN" }
        ],
        "ProviderName": "XmlTV",
        "TunerChannels": [
            { "Id": "t1", "Name": "ESPN (HD)", "ProviderChannelId": null, "ProviderChannelName": null },
            { "Id": "t2", "Name": "CNN", "ProviderChannelId": "cnn.us", "ProviderChannelName": "CNN" }
        ]
    }"#;

    let options: ChannelMappingOptions = serde_json::from_str(json).expect("decode options");
    assert_eq!(options.provider_name, "XmlTV");
    assert_eq!(options.mappings.len(), 1);
    assert_eq!(options.provider_channel_names(), vec!["ESPN HD", "CNN"]);
    assert!(!options.tuner_channels[0].is_mapped());
    assert!(options.tuner_channels[1].is_mapped());
    assert_eq!(options.mapped_tuner_count(), 1);
}

#[test]
fn set_mapping_serializes_camel_case() {
    let request = SetChannelMapping::new("prov", "tuner-1", "espn.us");
    let json = serde_json::to_value(&request).expect("serialize request");
    assert_eq!(
        json,
        serde_json::json!({
            "providerId": "prov",
            "providerChannelId": "espn.us",
            "tunerChannelId": "tuner-1"
        })
    );
}

#[test]
fn proposal_columns_follow_interchange_order() {
    let proposal = MappingProposal {
        tuner_channel_id: "t1".to_string(),
        tuner_channel_name: "ESPN (HD)".to_string(),
        provider_channel_id: "ESPN HD".to_string(),
        provider_channel_name: "ESPN HD".to_string(),
        score: 86,
    };
    assert_eq!(proposal.columns(), ["t1", "ESPN (HD)", "ESPN HD", "ESPN HD"]);
}
