//! Scripted stand-in for the console prompts.
#![allow(dead_code)]

use std::collections::VecDeque;

use move_to_folder::{Interaction, MoveToFolderError, NoticeKind};

#[derive(Debug, Default)]
pub struct Scripted {
    pub names: VecDeque<Option<String>>,
    pub confirms: VecDeque<bool>,
    pub prompts_seen: usize,
    pub confirms_seen: Vec<String>,
    pub notices: Vec<(String, NoticeKind)>,
}

impl Scripted {
    pub fn with_name(name: &str) -> Self {
        let mut s = Self::default();
        s.names.push_back(Some(name.to_string()));
        s
    }

    pub fn answering(mut self, confirm: bool) -> Self {
        self.confirms.push_back(confirm);
        self
    }
}

impl Interaction for Scripted {
    fn prompt_text(
        &mut self,
        _title: &str,
        _placeholder: &str,
    ) -> Result<Option<String>, MoveToFolderError> {
        self.prompts_seen += 1;
        Ok(self.names.pop_front().flatten())
    }

    fn confirm(&mut self, message: &str) -> Result<bool, MoveToFolderError> {
        self.confirms_seen.push(message.to_string());
        self.confirms
            .pop_front()
            .ok_or_else(|| MoveToFolderError::Prompt("unexpected confirm".into()))
    }

    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.notices.push((message.to_string(), kind));
    }
}
