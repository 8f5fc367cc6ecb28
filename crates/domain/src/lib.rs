mod date;
mod duration;
mod event;
mod job;
mod shared;
mod todo;

pub use date::{format_local_time, local_date, to_local};
pub use duration::{parse_duration, InvalidDurationError};
pub use event::{AgendaEvent, AgendaRange};
pub use job::{Job, JobAction, JobTrigger};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use todo::TodoItem;
