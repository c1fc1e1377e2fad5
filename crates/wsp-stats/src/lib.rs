//! wsp-stats — aggregate statistics over a parsed transcript.
//!
//! Every function here is a pure consumer of `&[Record]`: grouping and
//! summing only, no parsing. [`Summary::build`] gathers everything a chart
//! layer needs in one serializable value.

pub mod activity;
pub mod stopwords;
pub mod summary;
pub mod terms;
pub mod volume;

pub use activity::{activity_matrix, ActivityMatrix};
pub use stopwords::{StatsError, Stopwords};
pub use summary::Summary;
pub use terms::{term_frequency, TermCount, TermOptions};
pub use volume::{volume_by_hour, volume_by_month, volume_by_sender, MonthVolume, SenderVolume};
