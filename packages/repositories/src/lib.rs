pub mod error;
pub mod post;
pub mod user;

pub use error::RepositoryError;
pub use post::PostRepository;
pub use user::UserRepository;

#[cfg(test)]
mod test_helpers;
