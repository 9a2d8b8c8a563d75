pub use bitcoin::io::{Error, Read, Write};
