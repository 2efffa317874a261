/// Application events produced off the UI loop and delivered back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A toast's display time ran out.
    NoticeExpired(u64),
}
