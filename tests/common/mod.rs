#![allow(dead_code)]

pub const LINEAR_TEXT: &str = "A B C D E F G A B C H I J K L M";

pub const LOREM_IPSUM: &str = "
Everything, everything, everything, everything..
In its right place
In its right place
In its right place
Right place

Yesterday I woke up sucking a lemon
Yesterday I woke up sucking a lemon
Yesterday I woke up sucking a lemon
Yesterday I woke up sucking a lemon

Everything, everything, everything..
In its right place
In its right place
Right place

There are two colours in my head
There are two colours in my head
What is that you tried to say?
What was that you tried to say?
Tried to say.. tried to say..
Tried to say.. tried to say..

Everything in its right place 
";

/// Sum of all counts reported by a walk.
pub fn occurrence_sum(records: &[shingles::ShingleRecord]) -> usize {
    records.iter().map(|r| r.count).sum()
}
