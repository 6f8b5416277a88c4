mod join;
mod model;
mod object_id;
mod sequence;

pub use join::{full_outer_group_join, full_outer_join, group_by_key};
pub use model::{ensure_ids, set_created_dates, set_dates, HasCreated, HasDates, Identifiable};
pub use object_id::{ObjectId, ParseObjectIdError};
pub use sequence::{append_range, for_each};

// Re-export the ordered map the join helpers return groups in.
pub use indexmap::IndexMap;
