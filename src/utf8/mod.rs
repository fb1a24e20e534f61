pub mod char;
pub mod codec;
pub mod string;

pub use char::{
    any_char, any_char_ascii, char, fused_satisfy, satisfy, satisfy_ascii, skip_any_char,
    skip_any_char_ascii, skip_fused_satisfy, skip_satisfy, skip_satisfy_ascii,
};
pub use codec::{const_array, encode_const};
pub use string::string;
