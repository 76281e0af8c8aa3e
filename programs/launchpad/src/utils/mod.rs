pub mod lamports;
pub mod math;
pub mod pda;
pub mod string_bytes;
