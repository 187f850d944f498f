mod intent_files;
mod wire_format;
