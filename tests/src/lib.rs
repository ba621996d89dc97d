//! End-to-end flows against the public catalog API, exercised the way the
//! demo driver uses it.

#[cfg(test)]
mod catalog;
