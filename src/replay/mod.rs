pub(crate) mod scenario;
