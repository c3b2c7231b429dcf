pub mod opaque_token;
