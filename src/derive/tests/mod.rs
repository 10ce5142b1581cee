mod test_lcg;
mod test_mode;
