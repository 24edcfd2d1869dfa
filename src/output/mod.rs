mod format;
mod table;

pub(crate) use table::print_summary_table;
