#[cfg(test)]
mod permutation;
mod properties;
