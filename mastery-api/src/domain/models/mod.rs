mod goal;
mod ids;
mod record;
mod report;
mod user;

pub use goal::*;
pub use ids::*;
pub use record::*;
pub use report::*;
pub use user::*;
