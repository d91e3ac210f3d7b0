//! Test doubles for the workflow tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::io;
use std::time::Instant;

use chanmap_client::ClientError;
use chanmap_core::{Choice, LiveTvBackend, ProgressUpdate, Shell};
use chanmap_model::{
    ChannelMappingOptions, ListingProvider, ProviderChannel, SetChannelMapping, TunerChannel,
};

/// In-memory server that records every mapping write.
#[derive(Default)]
pub struct FakeBackend {
    pub providers: Vec<ListingProvider>,
    pub lineups: ChannelMappingOptions,
    /// Tuner channel ids whose mapping writes are rejected.
    pub rejected: HashSet<String>,
    pub options_requests: RefCell<Vec<String>>,
    pub writes: RefCell<Vec<(SetChannelMapping, Instant)>>,
}

impl FakeBackend {
    pub fn with_provider(id: &str) -> Self {
        Self {
            providers: vec![ListingProvider {
                id: id.to_string(),
                path: Some("/data/guide.xml".to_string()),
                provider_type: Some("xmltv".to_string()),
                ..ListingProvider::default()
            }],
            ..Self::default()
        }
    }

    pub fn write_requests(&self) -> Vec<SetChannelMapping> {
        self.writes.borrow().iter().map(|(request, _)| request.clone()).collect()
    }

    pub fn write_times(&self) -> Vec<Instant> {
        self.writes.borrow().iter().map(|(_, at)| *at).collect()
    }
}

impl LiveTvBackend for FakeBackend {
    fn listing_providers(&self) -> chanmap_client::Result<Vec<ListingProvider>> {
        Ok(self.providers.clone())
    }

    fn channel_mapping_options(
        &self,
        provider_id: &str,
    ) -> chanmap_client::Result<ChannelMappingOptions> {
        self.options_requests.borrow_mut().push(provider_id.to_string());
        Ok(self.lineups.clone())
    }

    fn set_channel_mapping(&self, request: &SetChannelMapping) -> chanmap_client::Result<()> {
        self.writes.borrow_mut().push((request.clone(), Instant::now()));
        if self.rejected.contains(&request.tuner_channel_id) {
            return Err(ClientError::Status {
                status: 400,
                url: "http://fake/LiveTv/ChannelMappings".to_string(),
                body: "unknown tuner channel".to_string(),
            });
        }
        Ok(())
    }
}

/// Shell that answers prompts from a script and records what it was shown.
#[derive(Default)]
pub struct ScriptedShell {
    pub choice_answers: VecDeque<Option<String>>,
    pub text_answers: VecDeque<Option<String>>,
    pub presented: Vec<Vec<Choice>>,
    pub messages: Vec<(String, String)>,
    pub progress: Vec<ProgressUpdate>,
}

impl ScriptedShell {
    pub fn answering(choice: Option<&str>, text: Option<&str>) -> Self {
        Self {
            choice_answers: VecDeque::from([choice.map(str::to_string)]),
            text_answers: VecDeque::from([text.map(str::to_string)]),
            ..Self::default()
        }
    }
}

impl Shell for ScriptedShell {
    fn present_choice(
        &mut self,
        _title: &str,
        _text: &str,
        choices: &[Choice],
    ) -> io::Result<Option<String>> {
        self.presented.push(choices.to_vec());
        Ok(self.choice_answers.pop_front().flatten())
    }

    fn show_message(&mut self, title: &str, text: &str) -> io::Result<()> {
        self.messages.push((title.to_string(), text.to_string()));
        Ok(())
    }

    fn request_text(&mut self, _title: &str, _text: &str) -> io::Result<Option<String>> {
        Ok(self.text_answers.pop_front().flatten())
    }

    fn show_progress(&mut self, update: ProgressUpdate) -> io::Result<()> {
        self.progress.push(update);
        Ok(())
    }
}

pub fn tuner(id: &str, name: &str) -> TunerChannel {
    TunerChannel {
        id: id.to_string(),
        name: name.to_string(),
        ..TunerChannel::default()
    }
}

pub fn provider_channel(id: &str, name: &str) -> ProviderChannel {
    ProviderChannel {
        id: id.to_string(),
        name: name.to_string(),
    }
}
