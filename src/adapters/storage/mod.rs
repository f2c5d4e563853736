//! Local storage adapters.

mod file_tour_flag_store;

pub use file_tour_flag_store::FileTourFlagStore;
