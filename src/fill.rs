//! Even-odd scanline fill

use crate::color::Rgba8;
use crate::pixfmt::PixelStore;
use crate::region::Region;

use std::cmp::min;
use std::cmp::max;

use log::debug;

/// Paint a region's accumulated spans into a pixel store
///
/// Each row in `[min_y, max_y]` is swept left to right with a running
/// crossing counter. The span that turns the counter odd opens a fill run
/// at its first column; spans are absorbed until the counter is even again
/// and the closing span's last column ends the run, inclusive. The sweep
/// resumes after the closing span, so nested subpaths come out as holes and
/// disjoint ones as independent fills.
///
/// Rows and columns are clamped against both the region and the store; a
/// row whose counts never return to even is closed at its last span, never
/// past it.
pub fn render_region<T: PixelStore>(region: &Region, pixf: &mut T, color: Rgba8) {
    if region.is_empty() {
        return;
    }
    let w = min(region.width, pixf.width()) as i64;
    let h = min(region.height, pixf.height()) as i64;
    if w == 0 || h == 0 {
        return;
    }
    let y1 = max(region.min_y, 0);
    let y2 = min(region.max_y, h - 1);

    for y in y1 ..= y2 {
        let row = region.row(y);
        let mut count = 0;
        let mut i = 0;
        while i < row.len() {
            count += row[i].passing;
            if count % 2 == 0 {
                i += 1;
                continue;
            }
            let start = row[i].x;
            let mut j = i;
            while count % 2 != 0 && j + 1 < row.len() {
                j += 1;
                count += row[j].passing;
            }
            let end = row[j].last();
            debug!("fill y {} columns {}..{}", y, start, end);
            let xa = max(start, 0);
            let xb = min(end, w - 1);
            if xa <= xb {
                pixf.copy_hline(xa as usize, y as usize,
                                (xb - xa + 1) as usize, color);
            }
            i = j + 1;
        }
    }
}
