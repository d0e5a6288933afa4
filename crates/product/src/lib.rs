pub mod abstract_trait;
pub mod domain;
pub mod model;
pub mod repository;
