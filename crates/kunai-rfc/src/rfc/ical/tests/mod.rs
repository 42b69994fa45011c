mod fixtures;
mod round_trip;
