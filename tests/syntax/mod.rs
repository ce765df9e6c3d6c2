mod tests_writer_roundtrip;
