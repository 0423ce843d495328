mod decode;
pub use decode::*;

mod submission;
pub use submission::*;
