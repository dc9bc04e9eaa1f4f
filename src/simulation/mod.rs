pub mod session_generator;
