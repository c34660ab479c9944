pub mod seconds_ext;
