pub mod job;
pub mod matching;
pub mod response;
pub mod resume;

pub use job::JobRecord;
pub use matching::{MatchDetails, MatchResult, MatchedResume};
pub use response::ApiDetail;
pub use resume::{ParsedResume, Resume, ResumeEntities};
