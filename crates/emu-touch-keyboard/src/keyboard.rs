//! Keyboard skins: layout, toggle overlays and key symbols.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::geometry::{Point, Polygon};
use crate::key::Key;
use crate::layout::{Layout, Row, Span};
use crate::skin::{C64Skin, Plus4Skin, SkinDefinition, SkinFamily};
use crate::symbols::{KeySymbols, KeyboardSymbols};

/// One on-screen keyboard skin.
#[derive(Debug, Clone)]
pub struct Keyboard {
    name: String,
    image_name: String,
    layout: Layout,
    toggle_keys: HashMap<Key, String>,
    symbols: KeyboardSymbols,
}

fn chars(s: &str) -> impl Iterator<Item = Key> + '_ {
    s.chars().map(Key::Char)
}

fn keys(lead: &[Key], printable: &str, trail: &[Key]) -> Vec<Key> {
    lead.iter()
        .copied()
        .chain(chars(printable))
        .chain(trail.iter().copied())
        .collect()
}

fn toggle_overlay(key: Key, image_name: &str) -> HashMap<Key, String> {
    HashMap::from([(key, format!("{image_name} ShiftLock"))])
}

impl Keyboard {
    /// Build a keyboard from one skin table entry.
    pub fn from_definition(definition: &SkinDefinition) -> Result<Self, ConfigError> {
        let image_name = definition.image_name();
        let keyboard = match &definition.family {
            SkinFamily::C64(skin) => Self::c64(&definition.name, image_name, skin),
            SkinFamily::Plus4(skin) => Self::plus4(&definition.name, image_name, skin),
        };
        keyboard.map_err(|e| e.in_skin(&definition.name))
    }

    /// C64-family keyboard: five rows plus the function key column.
    pub fn c64(name: &str, image_name: &str, skin: &C64Skin) -> Result<Self, ConfigError> {
        let lock = if skin.lock_is_shift {
            Key::ShiftLock
        } else {
            Key::CommodoreLock
        };
        let r = &skin.rows;
        let fkey = |key| Span::single(skin.function_keys_left, skin.function_keys_right, key);

        let rows = vec![
            Row::new(
                r[0],
                r[1],
                vec![
                    Span::new(
                        skin.top_half_left,
                        skin.top_half_right,
                        keys(
                            &[Key::ArrowLeft],
                            "1234567890+-£",
                            &[Key::ClearHome, Key::InsertDelete],
                        ),
                    )?,
                    fkey(Key::F1)?,
                ],
            )?,
            Row::new(
                r[1],
                r[2],
                vec![
                    Span::single(skin.top_half_left, skin.ctrl_right, Key::Control)?,
                    Span::new(
                        skin.ctrl_right,
                        skin.restore_left,
                        keys(&[], "qwertyuiop@*", &[Key::ArrowUp]),
                    )?,
                    Span::single(skin.restore_left, skin.top_half_right, Key::Restore)?,
                    fkey(Key::F3)?,
                ],
            )?,
            Row::new(
                r[2],
                r[3],
                vec![
                    Span::new(
                        skin.bottom_half_left,
                        skin.return_left,
                        keys(&[Key::RunStop, lock], "asdfghjkl:;=", &[]),
                    )?,
                    Span::single(skin.return_left, skin.bottom_half_right, Key::Return)?,
                    fkey(Key::F5)?,
                ],
            )?,
            Row::new(
                r[3],
                r[4],
                vec![
                    Span::single(skin.bottom_half_left, skin.left_shift_left, Key::Commodore)?,
                    Span::single(skin.left_shift_left, skin.left_shift_right, Key::ShiftLeft)?,
                    Span::new(
                        skin.left_shift_right,
                        skin.right_shift_left,
                        chars("zxcvbnm,./").collect(),
                    )?,
                    Span::single(skin.right_shift_left, skin.right_shift_right, Key::ShiftRight)?,
                    Span::new(
                        skin.right_shift_right,
                        skin.bottom_half_right,
                        vec![Key::CursorUpDown, Key::CursorLeftRight],
                    )?,
                    fkey(Key::F7)?,
                ],
            )?,
            Row::new(
                r[4],
                r[5],
                vec![Span::single(skin.space_left, skin.space_right, Key::Char(' '))?],
            )?,
        ];

        let mut symbols = KeyboardSymbols::c64();
        if skin.pound_is_yen {
            symbols.set(Key::Char('£'), KeySymbols::char('¥'));
        }

        Ok(Self {
            name: name.to_string(),
            image_name: image_name.to_string(),
            layout: Layout::new(rows, Vec::new()),
            toggle_keys: toggle_overlay(lock, image_name),
            symbols,
        })
    }

    /// Plus/4 keyboard: six rows and a diamond of four cursor keys.
    pub fn plus4(name: &str, image_name: &str, skin: &Plus4Skin) -> Result<Self, ConfigError> {
        let r = &skin.rows;

        let rows = vec![
            Row::new(
                r[0],
                r[1],
                vec![Span::new(
                    skin.function_left,
                    skin.function_right,
                    vec![Key::F1, Key::F2, Key::F3, Key::Help],
                )?],
            )?,
            Row::new(
                r[1],
                r[2],
                vec![Span::new(
                    skin.left,
                    skin.right,
                    keys(
                        &[Key::Escape],
                        "1234567890+-=",
                        &[Key::ClearHome, Key::InsertDelete],
                    ),
                )?],
            )?,
            Row::new(
                r[2],
                r[3],
                vec![
                    Span::single(skin.left, skin.left_control_right, Key::Control)?,
                    Span::new(
                        skin.left_control_right,
                        skin.right_control_left,
                        chars("qwertyuiop@£*").collect(),
                    )?,
                    Span::single(skin.right_control_left, skin.right, Key::Control)?,
                ],
            )?,
            Row::new(
                r[3],
                r[4],
                vec![
                    Span::new(
                        skin.left,
                        skin.return_left,
                        keys(&[Key::RunStop, Key::ShiftLock], "asdfghjkl:;", &[]),
                    )?,
                    Span::single(skin.return_left, skin.return_right, Key::Return)?,
                ],
            )?,
            Row::new(
                r[4],
                r[5],
                vec![
                    Span::single(skin.left, skin.left_shift_left, Key::Commodore)?,
                    Span::single(skin.left_shift_left, skin.left_shift_right, Key::Shift)?,
                    Span::new(
                        skin.left_shift_right,
                        skin.right_shift_left,
                        chars("zxcvbnm,./").collect(),
                    )?,
                    Span::single(skin.right_shift_left, skin.right_shift_right, Key::Shift)?,
                ],
            )?,
            Row::new(
                r[5],
                r[6],
                vec![Span::single(skin.space_left, skin.space_right, Key::Char(' '))?],
            )?,
        ];

        Ok(Self {
            name: name.to_string(),
            image_name: image_name.to_string(),
            layout: Layout::new(rows, cursor_diamond(skin)?),
            toggle_keys: toggle_overlay(Key::ShiftLock, image_name),
            symbols: KeyboardSymbols::plus4(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Key under `point`, in skin image pixels.
    #[must_use]
    pub fn hit(&self, point: Point) -> Option<Key> {
        self.layout.hit(point)
    }

    /// Toggle keys and the overlay image shown while each is engaged.
    #[must_use]
    pub fn toggle_keys(&self) -> &HashMap<Key, String> {
        &self.toggle_keys
    }

    #[must_use]
    pub fn toggle_image(&self, key: Key) -> Option<&str> {
        self.toggle_keys.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn symbols(&self) -> &KeyboardSymbols {
        &self.symbols
    }

    #[must_use]
    pub fn symbol(&self, key: Key) -> Option<&KeySymbols> {
        self.symbols.get(key)
    }
}

/// Four square wedges tiling the diamond inscribed in the cursor box.
///
/// Points on a 3×3 lattice rotated 45°: the diamond's four corners, the
/// midpoints of its edges and its centre. Each wedge has the centre as one
/// corner and the diamond corner of its direction opposite.
fn cursor_diamond(skin: &Plus4Skin) -> Result<Vec<Polygon>, ConfigError> {
    let (left, top, right, bottom) = (
        skin.cursor_left,
        skin.cursor_top,
        skin.cursor_right,
        skin.cursor_bottom,
    );
    if !(right > left && bottom > top) {
        return Err(ConfigError::DegenerateCursorCluster {
            left,
            top,
            right,
            bottom,
        });
    }

    let width = right - left;
    let height = bottom - top;
    let at = |fx: f64, fy: f64| Point::new(left + width * fx, top + height * fy);

    let north = at(0.5, 0.0);
    let north_west = at(0.25, 0.25);
    let north_east = at(0.75, 0.25);
    let west = at(0.0, 0.5);
    let centre = at(0.5, 0.5);
    let east = at(1.0, 0.5);
    let south_west = at(0.25, 0.75);
    let south_east = at(0.75, 0.75);
    let south = at(0.5, 1.0);

    Ok(vec![
        Polygon::new(vec![north, north_east, centre, north_west], Key::CursorUp),
        Polygon::new(vec![north_west, centre, south_west, west], Key::CursorLeft),
        Polygon::new(vec![north_east, east, south_east, centre], Key::CursorRight),
        Polygon::new(vec![centre, south_east, south, south_west], Key::CursorDown),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn c64_skin() -> C64Skin {
        C64Skin {
            rows: [69, 257, 446, 635, 824, 1012],
            top_half_left: 100,
            top_half_right: 3034,
            bottom_half_left: 49,
            bottom_half_right: 2984,
            function_keys_left: 3115,
            function_keys_right: 3415,
            space_left: 544,
            space_right: 2207,
            ctrl_right: 330,
            restore_left: 2778,
            return_left: 2681,
            left_shift_left: 283,
            left_shift_right: 559,
            right_shift_left: 2341,
            right_shift_right: 2681,
            lock_is_shift: true,
            pound_is_yen: false,
        }
    }

    fn plus4_skin() -> Plus4Skin {
        Plus4Skin {
            rows: [0, 100, 200, 300, 400, 500, 600],
            function_left: 100,
            function_right: 500,
            left: 0,
            right: 1600,
            left_control_right: 150,
            right_control_left: 1450,
            return_left: 1300,
            return_right: 1550,
            left_shift_left: 100,
            left_shift_right: 250,
            right_shift_left: 1250,
            right_shift_right: 1400,
            space_left: 300,
            space_right: 1100,
            cursor_top: 300.0,
            cursor_left: 1700.0,
            cursor_right: 1900.0,
            cursor_bottom: 500.0,
        }
    }

    fn plus4() -> Keyboard {
        Keyboard::plus4("Plus/4", "Plus/4", &plus4_skin()).expect("valid skin")
    }

    /// Centre of bucket `index` of `count` in `[left, right)`.
    fn bucket_centre(left: i32, right: i32, count: i32, index: i32) -> f64 {
        let width = f64::from(right - left) / f64::from(count);
        f64::from(left) + width * (f64::from(index) + 0.5)
    }

    #[test]
    fn c64_top_row() {
        let kb = Keyboard::c64("C64", "C64", &c64_skin()).expect("valid skin");
        let y = 150.0;
        assert_eq!(kb.hit(pt(bucket_centre(100, 3034, 16, 0), y)), Some(Key::ArrowLeft));
        assert_eq!(kb.hit(pt(bucket_centre(100, 3034, 16, 1), y)), Some(Key::Char('1')));
        assert_eq!(kb.hit(pt(bucket_centre(100, 3034, 16, 13), y)), Some(Key::Char('£')));
        assert_eq!(kb.hit(pt(bucket_centre(100, 3034, 16, 15), y)), Some(Key::InsertDelete));
        assert_eq!(kb.hit(pt(3200.0, y)), Some(Key::F1));
        // Gap between the main block and the function keys.
        assert_eq!(kb.hit(pt(3070.0, y)), None);
    }

    #[test]
    fn c64_control_cluster() {
        let kb = Keyboard::c64("C64", "C64", &c64_skin()).expect("valid skin");
        let y = 300.0;
        assert_eq!(kb.hit(pt(200.0, y)), Some(Key::Control));
        assert_eq!(kb.hit(pt(bucket_centre(330, 2778, 13, 0), y)), Some(Key::Char('q')));
        assert_eq!(kb.hit(pt(bucket_centre(330, 2778, 13, 12), y)), Some(Key::ArrowUp));
        assert_eq!(kb.hit(pt(2900.0, y)), Some(Key::Restore));
        assert_eq!(kb.hit(pt(3200.0, y)), Some(Key::F3));
    }

    #[test]
    fn c64_lower_rows() {
        let kb = Keyboard::c64("C64", "C64", &c64_skin()).expect("valid skin");
        assert_eq!(kb.hit(pt(bucket_centre(49, 2681, 14, 0), 500.0)), Some(Key::RunStop));
        assert_eq!(kb.hit(pt(bucket_centre(49, 2681, 14, 1), 500.0)), Some(Key::ShiftLock));
        assert_eq!(kb.hit(pt(2800.0, 500.0)), Some(Key::Return));
        assert_eq!(kb.hit(pt(3200.0, 500.0)), Some(Key::F5));

        assert_eq!(kb.hit(pt(100.0, 700.0)), Some(Key::Commodore));
        assert_eq!(kb.hit(pt(400.0, 700.0)), Some(Key::ShiftLeft));
        assert_eq!(kb.hit(pt(bucket_centre(559, 2341, 10, 0), 700.0)), Some(Key::Char('z')));
        assert_eq!(kb.hit(pt(2500.0, 700.0)), Some(Key::ShiftRight));
        assert_eq!(kb.hit(pt(2750.0, 700.0)), Some(Key::CursorUpDown));
        assert_eq!(kb.hit(pt(2900.0, 700.0)), Some(Key::CursorLeftRight));
        assert_eq!(kb.hit(pt(3200.0, 700.0)), Some(Key::F7));

        assert_eq!(kb.hit(pt(1000.0, 900.0)), Some(Key::Char(' ')));
        assert_eq!(kb.hit(pt(300.0, 900.0)), None);
    }

    #[test]
    fn c64_outside_rows_misses() {
        let kb = Keyboard::c64("C64", "C64", &c64_skin()).expect("valid skin");
        assert_eq!(kb.hit(pt(500.0, 68.9)), None);
        assert_eq!(kb.hit(pt(1000.0, 1012.0)), None);
        assert_eq!(kb.hit(pt(-10.0, -10.0)), None);
    }

    #[test]
    fn commodore_lock_variant() {
        let skin = C64Skin {
            lock_is_shift: false,
            ..c64_skin()
        };
        let kb = Keyboard::c64("Japanese", "Japanese", &skin).expect("valid skin");
        assert_eq!(
            kb.hit(pt(bucket_centre(49, 2681, 14, 1), 500.0)),
            Some(Key::CommodoreLock)
        );
        assert_eq!(kb.toggle_image(Key::CommodoreLock), Some("Japanese ShiftLock"));
        assert_eq!(kb.toggle_image(Key::ShiftLock), None);
    }

    #[test]
    fn shift_lock_toggle_uses_image_name() {
        let kb = Keyboard::c64("VIC-1001", "PET Japanese", &c64_skin()).expect("valid skin");
        assert_eq!(kb.toggle_image(Key::ShiftLock), Some("PET Japanese ShiftLock"));
        assert_eq!(kb.toggle_keys().len(), 1);
    }

    #[test]
    fn yen_override() {
        let skin = C64Skin {
            pound_is_yen: true,
            ..c64_skin()
        };
        let kb = Keyboard::c64("Yen", "Yen", &skin).expect("valid skin");
        assert_eq!(kb.symbol(Key::Char('£')), Some(&KeySymbols::char('¥')));
        // The key itself is unchanged; only its legend differs.
        assert_eq!(kb.hit(pt(bucket_centre(100, 3034, 16, 13), 150.0)), Some(Key::Char('£')));

        let plain = Keyboard::c64("C64", "C64", &c64_skin()).expect("valid skin");
        assert_eq!(plain.symbol(Key::Char('£')), Some(&KeySymbols::char('£')));
    }

    #[test]
    fn invalid_boundaries_fail_at_construction() {
        let skin = C64Skin {
            restore_left: 300,
            ..c64_skin()
        };
        assert!(matches!(
            Keyboard::c64("Bad", "Bad", &skin),
            Err(ConfigError::EmptySpanRange { left: 330, right: 300 })
        ));

        let skin = C64Skin {
            rows: [69, 257, 257, 635, 824, 1012],
            ..c64_skin()
        };
        assert!(matches!(
            Keyboard::c64("Bad", "Bad", &skin),
            Err(ConfigError::EmptyRowRange { .. })
        ));
    }

    #[test]
    fn plus4_rows() {
        let kb = plus4();
        assert_eq!(kb.hit(pt(150.0, 50.0)), Some(Key::F1));
        assert_eq!(kb.hit(pt(450.0, 50.0)), Some(Key::Help));
        assert_eq!(kb.hit(pt(50.0, 150.0)), Some(Key::Escape));
        assert_eq!(kb.hit(pt(1550.0, 150.0)), Some(Key::InsertDelete));
        assert_eq!(kb.hit(pt(50.0, 250.0)), Some(Key::Control));
        assert_eq!(kb.hit(pt(1500.0, 250.0)), Some(Key::Control));
        assert_eq!(kb.hit(pt(1400.0, 350.0)), Some(Key::Return));
        assert_eq!(kb.hit(pt(150.0, 450.0)), Some(Key::Shift));
        assert_eq!(kb.hit(pt(1300.0, 450.0)), Some(Key::Shift));
        assert_eq!(kb.hit(pt(700.0, 550.0)), Some(Key::Char(' ')));
        assert_eq!(kb.toggle_image(Key::ShiftLock), Some("Plus/4 ShiftLock"));
    }

    #[test]
    fn plus4_cursor_wedges() {
        let kb = plus4();
        // Diamond centre (1800, 400), half-size 100.
        assert_eq!(kb.hit(pt(1800.0, 330.0)), Some(Key::CursorUp));
        assert_eq!(kb.hit(pt(1730.0, 400.0)), Some(Key::CursorLeft));
        assert_eq!(kb.hit(pt(1870.0, 400.0)), Some(Key::CursorRight));
        assert_eq!(kb.hit(pt(1800.0, 470.0)), Some(Key::CursorDown));
        // Box corners lie outside the diamond.
        assert_eq!(kb.hit(pt(1705.0, 305.0)), None);
        assert_eq!(kb.hit(pt(1895.0, 495.0)), None);
    }

    #[test]
    fn plus4_wedges_do_not_overlap() {
        let skin = plus4_skin();
        let wedges = cursor_diamond(&skin).expect("valid cluster");
        let mut hits = HashMap::new();
        for yi in 0..200 {
            for xi in 0..200 {
                // Off-lattice offsets keep samples off every wedge edge.
                let p = pt(1700.0 + f64::from(xi) + 0.3, 300.0 + f64::from(yi) + 0.6);
                let owners: Vec<Key> = wedges.iter().filter_map(|w| w.hit(p)).collect();
                assert!(owners.len() <= 1, "{p:?} is in {owners:?}");
                if let Some(&key) = owners.first() {
                    *hits.entry(key).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(hits.len(), 4);
        // Each wedge is a quarter of the diamond (area 20_000).
        for count in hits.values() {
            assert!((4_800..=5_200).contains(count), "{hits:?}");
        }
    }

    #[test]
    fn degenerate_cursor_cluster_fails() {
        let skin = Plus4Skin {
            cursor_right: 1700.0,
            ..plus4_skin()
        };
        assert!(matches!(
            Keyboard::plus4("Bad", "Bad", &skin),
            Err(ConfigError::DegenerateCursorCluster { .. })
        ));
    }

    #[test]
    fn from_definition_wraps_errors_with_skin_name() {
        let definition = SkinDefinition {
            name: "Broken".to_string(),
            image: None,
            family: SkinFamily::C64(C64Skin {
                space_right: 0,
                ..c64_skin()
            }),
        };
        let err = Keyboard::from_definition(&definition).expect_err("invalid skin");
        assert!(matches!(err, ConfigError::InvalidSkin { ref name, .. } if name == "Broken"));
        assert!(err.to_string().starts_with("skin 'Broken'"));
    }

    #[test]
    fn repeated_queries_agree() {
        let kb = plus4();
        for p in [pt(1800.0, 330.0), pt(700.0, 550.0), pt(-1.0, -1.0)] {
            let first = kb.hit(p);
            for _ in 0..10 {
                assert_eq!(kb.hit(p), first);
            }
        }
    }
}
