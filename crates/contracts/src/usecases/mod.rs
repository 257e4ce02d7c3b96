pub mod u101_identify_part;
