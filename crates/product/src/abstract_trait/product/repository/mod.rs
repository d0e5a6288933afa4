mod command;
mod query;

pub use self::command::ProductCommandRepositoryTrait;
pub use self::query::ProductQueryRepositoryTrait;
