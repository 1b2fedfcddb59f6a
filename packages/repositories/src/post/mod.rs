mod create;
mod read;

pub struct PostRepository;
