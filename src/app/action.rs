use crate::app::event::SearchSeq;
use crate::search::classify::SearchParam;

/// Side effects requested by the event handler, executed by the main loop.
#[derive(Debug)]
pub enum Action {
    Search { seq: SearchSeq, param: SearchParam },
    Quit,
}
