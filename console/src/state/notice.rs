//! Transient operator notices (toast queue).
//!
//! DESIGN
//! ======
//! Errors surface here exactly once, pushed by the API client's notifier
//! hook. The queue is capped; old notices fall off the front rather than
//! stacking without bound on a flaky network.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Most notices shown at once.
const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Error,
    Success,
}

/// One toast. `id` is unique for the lifetime of the page so dismissal
/// cannot race a newer notice with the same text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    next_id: u64,
    pub notices: Vec<Notice>,
}

fn push(state: &mut NoticeState, kind: NoticeKind, text: String) -> u64 {
    let id = state.next_id;
    state.next_id += 1;
    state.notices.push(Notice { id, kind, text });
    if state.notices.len() > MAX_NOTICES {
        let overflow = state.notices.len() - MAX_NOTICES;
        state.notices.drain(..overflow);
    }
    id
}

/// Queue an error toast, returning its id.
pub fn push_error(state: &mut NoticeState, text: String) -> u64 {
    push(state, NoticeKind::Error, text)
}

/// Queue a success toast, returning its id.
pub fn push_success(state: &mut NoticeState, text: String) -> u64 {
    push(state, NoticeKind::Success, text)
}

/// Remove one notice; unknown ids are ignored.
pub fn dismiss(state: &mut NoticeState, id: u64) {
    state.notices.retain(|notice| notice.id != id);
}
