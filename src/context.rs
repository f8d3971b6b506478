//! Page Context
//!
//! Collaborators shared by every handler the controller wires up. Browser
//! code builds them with `for_document`; tests swap in fakes field by field.

use std::rc::Rc;

use crate::commands::{FetchTaskApi, TaskApi};
use crate::config::PageConfig;
use crate::delete_guard::{Confirm, WindowConfirm};
use crate::diagnostics::Diagnostics;
use crate::notifier::{BannerNotifier, Notifier};
use crate::token::{DocumentTokenSource, TokenSource};

#[derive(Clone)]
pub struct PageContext {
    pub config: Rc<PageConfig>,
    pub api: Rc<dyn TaskApi>,
    pub tokens: Rc<dyn TokenSource>,
    pub notifier: Rc<dyn Notifier>,
    pub confirm: Rc<dyn Confirm>,
    pub diagnostics: Rc<dyn Diagnostics>,
}

impl PageContext {
    /// Browser implementations for every collaborator
    pub fn for_document(
        document: &web_sys::Document,
        config: PageConfig,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        let config = Rc::new(config);
        Self {
            api: Rc::new(FetchTaskApi::new(config.clone())),
            tokens: Rc::new(DocumentTokenSource::new(document.clone())),
            notifier: Rc::new(BannerNotifier::new(
                document.clone(),
                config.notice_timeout_ms,
                diagnostics.clone(),
            )),
            confirm: Rc::new(WindowConfirm),
            config,
            diagnostics,
        }
    }
}
