pub mod multipart;
pub mod reqwest;
pub mod time;

#[cfg(test)]
pub mod test_support;
