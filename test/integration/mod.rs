mod cli;
mod end_to_end;
