pub mod terms;

pub use terms::filter_entries;
