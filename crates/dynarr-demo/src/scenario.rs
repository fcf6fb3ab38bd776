use core::fmt::{self, Debug, Display};

use dynarr_mem::{Cursor, DynamicArray};

use dynarr_log::{debug, info};

use crate::{DemoError, DemoSettings};

/// Element type with a single field, standing in for any user struct.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sample {
    pub x: i32,
}

impl Sample {

    pub fn new(x: i32) -> Self {
        Self { x }
    }
}

/// Sequences observed at each step of [`run`].
#[derive(Clone, Debug)]
pub struct DemoReport {
    pub doubled: DynamicArray<i64>,
    pub forward: DynamicArray<i64>,
    pub reverse: DynamicArray<i64>,
    pub after_insert: DynamicArray<i64>,
    pub removed: i64,
    pub after_remove: DynamicArray<i64>,
    pub samples: DynamicArray<i32>,
    pub copied: DynamicArray<i64>,
    pub copied_capacity: usize,
    pub moved: DynamicArray<i64>,
    pub range_walk: DynamicArray<i64>,
}

fn walk<T: Clone>(mut cursor: Cursor<'_, T>) -> DynamicArray<T> {
    let mut out = DynamicArray::new();
    while cursor.has_next() {
        out.insert(cursor.get().clone());
        cursor.move_next();
    }
    out
}

fn check<T>(step: &'static str, found: &[T], expected: &[T]) -> Result<(), DemoError>
    where
        T: PartialEq + Debug,
{
    if found != expected {
        return Err(DemoError::Mismatch {
            step,
            expected: format!("{:?}", expected),
            found: format!("{:?}", found),
        })
    }
    Ok(())
}

fn check_value<T>(step: &'static str, found: T, expected: T) -> Result<(), DemoError>
    where
        T: PartialEq + Debug,
{
    check(step, &[found], &[expected])
}

/// Runs every array operation in turn and checks what each one produces.
pub fn run(settings: &DemoSettings) -> Result<DemoReport, DemoError> {
    settings.validate()?;
    let count = settings.count;
    let index = settings.insert_index;
    let value = settings.inserted_value;
    let expected: DynamicArray<i64> = (1..=count as i64).map(|v| v * 2).collect();

    let mut array = DynamicArray::try_new()?;
    for i in 0..count {
        array.try_insert(i as i64 + 1)?;
    }
    for i in 0..array.len() {
        array[i] *= 2;
    }
    debug!("filled {} elements, capacity {}", array.len(), array.capacity());
    info!("doubled: {:?}", array);
    check("double in place", &array, &expected)?;
    let doubled = array.clone();

    let forward = walk(array.cursor());
    info!("forward iteration: {:?}", forward);
    check("forward iteration", &forward, &expected)?;

    let reverse = walk(array.rev_cursor());
    info!("reverse iteration: {:?}", reverse);
    let mut mirrored = expected.clone();
    mirrored.reverse();
    check("reverse iteration", &reverse, &mirrored)?;

    check_value("insert index", array.try_insert_at(index, value)?, index)?;
    info!("after inserting {} at index {}: {:?}", value, index, array);
    check_value("size after insert", array.len(), count + 1)?;
    check_value("inserted element", array[index], value)?;
    if let Some(&shifted) = expected.get(index) {
        check_value("shifted element", array[index + 1], shifted)?;
    }
    let after_insert = array.clone();

    let removed = array.remove(index);
    info!("after removing index {}: {:?}", index, array);
    check_value("removed element", removed, value)?;
    check("remove", &array, &expected)?;
    let after_remove = array.clone();

    let mut structs = DynamicArray::new();
    for i in 0..5 {
        structs.try_insert(Sample::new(i + 10))?;
    }
    let samples: DynamicArray<i32> = walk(structs.cursor()).iter().map(|s| s.x).collect();
    info!("struct values: {:?}", samples);
    check("struct elements", &samples, &[10, 11, 12, 13, 14])?;

    let mut copied = array.clone();
    info!("copied array: {:?}", copied);
    check("copy", &copied, &array)?;
    check_value("copy capacity", copied.capacity(), array.capacity())?;
    let copied_capacity = copied.capacity();
    let copy = copied.clone();

    let moved = copied.take();
    info!("moved array: {:?}", moved);
    check("move", &moved, &copy)?;
    check_value("moved-from size", copied.len(), 0)?;
    check_value("moved-from capacity", copied.capacity(), 0)?;

    let mut range_walk = DynamicArray::new();
    for &v in &moved {
        range_walk.try_insert(v)?;
    }
    info!("range walk: {:?}", range_walk);
    check("range walk", &range_walk, &moved)?;

    info!("all demo operations completed");
    Ok(DemoReport {
        doubled,
        forward,
        reverse,
        after_insert,
        removed,
        after_remove,
        samples,
        copied: copy,
        copied_capacity,
        moved,
        range_walk,
    })
}

fn write_line<T: Display>(f: &mut fmt::Formatter<'_>, title: &str, values: &[T]) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    for (i, v) in values.iter().enumerate() {
        if i != 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", v)?;
    }
    writeln!(f)
}

impl Display for DemoReport {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, "Forward iteration", &self.forward)?;
        write_line(f, "Reverse iteration", &self.reverse)?;
        write_line(f, "After insert", &self.after_insert)?;
        write_line(f, "After remove", &self.after_remove)?;
        write_line(f, "Struct values", &self.samples)?;
        write_line(f, "Copied array", &self.copied)?;
        write_line(f, "Moved array", &self.moved)?;
        write_line(f, "Range walk", &self.range_walk)
    }
}
