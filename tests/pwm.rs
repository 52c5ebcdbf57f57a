mod common;

mod tests {
    use badge_led_cycle::leds::{ALL_ON, Channel};
    use badge_led_cycle::pwm::{Gate, column_pattern, gate_plan, render_column};
    use badge_led_cycle::{Column, Rgb};

    use crate::common::FakeLeds;

    const COLORS: [Rgb; 5] = [
        Rgb { r: 0, g: 0x55, b: 0xAA },
        Rgb { r: 0, g: 0, b: 0 },
        Rgb { r: 255, g: 255, b: 255 },
        Rgb { r: 10, g: 200, b: 37 },
        Rgb { r: 128, g: 1, b: 254 },
    ];

    #[test]
    fn test_masks_partition_each_column() {
        for column in Column::ALL {
            let masks = column.masks();
            let mut union = 0_u16;
            for channel in Channel::ALL {
                let mask = masks.get(channel);
                assert_eq!(union & mask, 0, "{column:?} {channel:?} overlaps");
                union |= mask;
            }
            assert_eq!(union, ALL_ON, "{column:?}");
        }
    }

    #[test]
    fn test_gate_plan_skips_empty_channels() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(gate_plan(Column::First, color).len(), 3);
        assert_eq!(
            gate_plan(Column::Second, color).as_slice(),
            &[
                Gate { threshold: 1, mask: 0b001_1000_0000 },
                Gate { threshold: 2, mask: 0b110_0111_1111 },
            ]
        );
        assert_eq!(
            gate_plan(Column::Third, color).as_slice(),
            &[
                Gate { threshold: 1, mask: 0b000_0110_1010 },
                Gate { threshold: 3, mask: 0b111_1001_0101 },
            ]
        );
    }

    #[test]
    fn test_column_pattern_thresholds() {
        let full = Rgb::new(255, 255, 255);
        assert_eq!(column_pattern(Column::First, full, 0), ALL_ON);
        assert_eq!(column_pattern(Column::First, full, 254), ALL_ON);
        assert_eq!(column_pattern(Column::First, full, 255), 0);

        let off = Rgb::new(0, 0, 0);
        for column in Column::ALL {
            assert_eq!(column_pattern(column, off, 0), 0);
        }

        let color = Rgb::new(10, 200, 37);
        let masks = Column::First.masks();
        assert_eq!(column_pattern(Column::First, color, 9), ALL_ON);
        assert_eq!(column_pattern(Column::First, color, 10), ALL_ON & !masks.red);
        assert_eq!(
            column_pattern(Column::First, color, 37),
            masks.green
        );
        assert_eq!(column_pattern(Column::First, color, 200), 0);
    }

    #[test]
    fn test_column_pattern_is_monotonic() {
        for column in Column::ALL {
            for color in COLORS {
                let mut previous = column_pattern(column, color, 0);
                for step in 1..=u8::MAX {
                    let pattern = column_pattern(column, color, step);
                    assert_eq!(pattern & !previous, 0, "{column:?} {color:?} step {step}");
                    assert!(pattern.count_ones() <= previous.count_ones());
                    previous = pattern;
                }
            }
        }
    }

    #[test]
    fn test_render_column_register_pass() {
        let mut leds = FakeLeds::default();
        let color = Rgb::new(10, 200, 255);
        render_column(&mut leds, Column::Third, color);

        assert_eq!(leds.selects, [Column::Third]);
        assert_eq!(leds.writes[0], ALL_ON);
        // Red is cleared on sub-steps 10..=255, blue only on 255
        assert_eq!(leds.writes.len(), 1 + 246 + 1);
        let masks = Column::Third.masks();
        assert!(leds.writes[1..246].iter().all(|&p| p == ALL_ON & !masks.red));
        assert_eq!(leds.pattern, 0);
    }

    #[test]
    fn test_render_column_matches_pattern() {
        for column in Column::ALL {
            for color in COLORS {
                let mut leds = FakeLeds::default();
                render_column(&mut leds, column, color);

                let mut previous = ALL_ON;
                for &pattern in &leds.writes {
                    assert_eq!(pattern & !previous, 0);
                    previous = pattern;
                }
                assert_eq!(leds.pattern, column_pattern(column, color, u8::MAX));
            }
        }
    }
}
