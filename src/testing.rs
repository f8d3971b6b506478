//! Test Fakes
//!
//! In-memory stand-ins for every collaborator in `PageContext`.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::commands::TaskApi;
use crate::config::PageConfig;
use crate::context::PageContext;
use crate::delete_guard::Confirm;
use crate::diagnostics::{Diagnostics, Level};
use crate::error::ToggleError;
use crate::filter::SubmitTarget;
use crate::models::{Notice, TaskId, ToggleResult};
use crate::notifier::Notifier;
use crate::toggle::ToggleView;
use crate::token::TokenSource;

type ToggleReply = Result<ToggleResult, ToggleError>;

#[derive(Default)]
pub struct RecordingDiagnostics {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingDiagnostics {
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(l, line)| *l == level && line.contains(needle))
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

pub struct StaticTokens {
    meta: Option<String>,
    input: Option<String>,
}

impl StaticTokens {
    pub fn new(meta: Option<&str>, input: Option<&str>) -> Self {
        Self {
            meta: meta.map(str::to_string),
            input: input.map(str::to_string),
        }
    }
}

impl TokenSource for StaticTokens {
    fn meta_token(&self) -> Option<String> {
        self.meta.clone()
    }

    fn input_token(&self) -> Option<String> {
        self.input.clone()
    }
}

/// Checkbox state plus the last completed state applied
pub struct FakeView {
    checked: Cell<bool>,
    completed: Cell<Option<bool>>,
}

impl FakeView {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Cell::new(checked),
            completed: Cell::new(None),
        }
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed.get()
    }
}

impl ToggleView for FakeView {
    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    fn set_completed(&self, completed: bool) {
        self.completed.set(Some(completed));
    }
}

/// Answers toggles from a fixed script, recording (task id, token) pairs
#[derive(Clone, Default)]
pub struct ScriptedApi {
    replies: Rc<RefCell<VecDeque<ToggleReply>>>,
    calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl ScriptedApi {
    pub fn new(replies: Vec<ToggleReply>) -> Self {
        Self {
            replies: Rc::new(RefCell::new(replies.into())),
            calls: Rc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TaskApi for ScriptedApi {
    async fn toggle(&self, task_id: &TaskId, token: &str) -> ToggleReply {
        self.calls
            .borrow_mut()
            .push((task_id.to_string(), token.to_string()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ToggleError::Transport("no scripted reply".to_string())))
    }
}

/// Each toggle waits on the next gate; tests decide when and how it opens
pub struct GatedApi {
    gates: RefCell<VecDeque<oneshot::Receiver<ToggleReply>>>,
}

impl GatedApi {
    pub fn new(gates: Vec<oneshot::Receiver<ToggleReply>>) -> Self {
        Self {
            gates: RefCell::new(gates.into()),
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for GatedApi {
    async fn toggle(&self, _task_id: &TaskId, _token: &str) -> ToggleReply {
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(ToggleError::Transport("gate dropped".to_string()))),
            None => Err(ToggleError::Transport("no gate".to_string())),
        }
    }
}

pub struct ScriptedConfirm {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: RefCell::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}

#[derive(Default)]
pub struct CountingForm {
    submissions: Cell<usize>,
    failure: Option<String>,
}

impl CountingForm {
    pub fn failing(reason: &str) -> Self {
        Self {
            submissions: Cell::new(0),
            failure: Some(reason.to_string()),
        }
    }

    pub fn submissions(&self) -> usize {
        self.submissions.get()
    }
}

impl SubmitTarget for CountingForm {
    fn submit_form(&self) -> Result<(), String> {
        self.submissions.set(self.submissions.get() + 1);
        match &self.failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}

/// A context wired entirely to fakes, with handles on the recorders
pub struct Harness {
    pub ctx: PageContext,
    pub diagnostics: Rc<RecordingDiagnostics>,
    pub notices: Rc<RecordingNotifier>,
    pub confirm: Rc<ScriptedConfirm>,
}

pub fn harness(api: impl TaskApi + 'static, config: PageConfig) -> Harness {
    let diagnostics = Rc::new(RecordingDiagnostics::default());
    let notices = Rc::new(RecordingNotifier::default());
    let confirm = Rc::new(ScriptedConfirm::new(true));
    let ctx = PageContext {
        config: Rc::new(config),
        api: Rc::new(api),
        tokens: Rc::new(StaticTokens::new(Some("tok"), None)),
        notifier: notices.clone(),
        confirm: confirm.clone(),
        diagnostics: diagnostics.clone(),
    };
    Harness {
        ctx,
        diagnostics,
        notices,
        confirm,
    }
}
