mod debug;
mod from_iter;
