pub mod app_state;

#[cfg(test)]
pub(crate) mod test_support;
