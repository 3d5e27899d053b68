use pathduel_core::Point;

/// Manhattan (L1) distance between two points: `|Δrow| + |Δcol|`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row() - b.row()).abs() + (a.col() - b.col()).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::at(0, 0);
        let b = Point::at(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
