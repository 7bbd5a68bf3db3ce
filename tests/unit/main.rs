//! Unit tests laid out to mirror `src/`, one file per source file

mod io;
