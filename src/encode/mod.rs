pub(crate) mod bmp;
