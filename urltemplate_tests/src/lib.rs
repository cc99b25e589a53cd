//! Checks of `urltemplate` types embedded into serde documents.

#[cfg(test)]
mod document;
