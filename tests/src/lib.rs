#[cfg(test)]
mod data;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod ucd;
