//! Unit tests, aggregated one file per tested module, mirroring the layout
//! of the module they exercise rather than living inline next to it.

mod aes_round;
mod block;
mod crc32c;
mod decrypt;
mod hash;
mod tiny;
mod wideblock;
mod wordlist;
