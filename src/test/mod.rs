//! Support code shared by the in-module quicktests.
