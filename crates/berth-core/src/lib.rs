pub mod clock;
pub mod identity;
pub mod records;
pub mod settings;
pub mod timings;

pub use records::{ActiveWindowRecord, LeaseRecord};
pub use settings::Settings;
pub use timings::Timings;
