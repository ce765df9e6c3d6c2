mod tests_extract;
mod tests_files;
mod tests_merge;
mod tests_properties;
