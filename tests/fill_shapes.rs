
use scanfill::{render_region, RasterizerRegion, Rgba8, SliceMem};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn alpha(buf: &[u8], width: usize, x: usize, y: usize) -> u8 {
    buf[(y * width + x) * 4 + 3]
}

fn assert_row(buf: &[u8], width: usize, y: usize, filled: &[usize]) {
    for x in 0 .. width {
        let hit = filled.contains(&x);
        assert_eq!(alpha(buf, width, x, y) != 0, hit, "pixel ({},{})", x, y);
    }
}

#[test]
fn diamond_row_coverage() {
    init();
    let (w, h) = (10usize, 7usize);
    let mut ras = RasterizerRegion::new(w, h);
    ras.begin_path(5.0, 1.0);
    ras.line_to(8.0, 2.0);
    ras.line_to(5.0, 5.0);
    ras.line_to(2.0, 2.0);
    ras.close_path();

    let mut buf = vec![0u8; w * h * 4];
    {
        let mut pixf = SliceMem::new(&mut buf, w, h);
        render_region(&ras.region, &mut pixf, Rgba8::black());
    }

    // One run per interior row, spanning the diamond's width there
    assert_row(&buf, w, 2, &[2,3,4,5,6,7,8]);
    assert_row(&buf, w, 3, &[3,4,5,6,7]);
    assert_row(&buf, w, 4, &[4,5,6]);
    // Rows outside the bounding box stay untouched
    assert_row(&buf, w, 0, &[]);
    assert_row(&buf, w, 6, &[]);
}

#[test]
fn repeated_render_is_identical() {
    init();
    let (w, h) = (10usize, 7usize);
    let mut ras = RasterizerRegion::new(w, h);
    ras.begin_path(5.0, 1.0);
    ras.line_to(8.0, 2.0);
    ras.line_to(5.0, 5.0);
    ras.line_to(2.0, 2.0);
    ras.close_path();

    let mut buf = vec![0u8; w * h * 4];
    {
        let mut pixf = SliceMem::new(&mut buf, w, h);
        render_region(&ras.region, &mut pixf, Rgba8::black());
    }
    let first = buf.clone();
    {
        let mut pixf = SliceMem::new(&mut buf, w, h);
        render_region(&ras.region, &mut pixf, Rgba8::black());
    }
    assert_eq!(first, buf);
}

#[test]
fn apex_on_scanline_does_not_flip_parity() {
    init();
    let (w, h) = (12usize, 8usize);
    let mut ras = RasterizerRegion::new(w, h);
    ras.begin_path(5.0, 1.0);
    ras.line_to(8.0, 5.0);
    ras.line_to(2.0, 5.0);
    ras.close_path();

    let mut buf = vec![0u8; w * h * 4];
    {
        let mut pixf = SliceMem::new(&mut buf, w, h);
        render_region(&ras.region, &mut pixf, Rgba8::black());
    }

    // The apex sits exactly on row 1; nothing right of it on that row may
    // fill, and the rows below must close normally
    assert_row(&buf, w, 1, &[]);
    assert_row(&buf, w, 2, &[4,5]);
    assert_row(&buf, w, 3, &[3,4,5,6]);
    assert_row(&buf, w, 4, &[2,3,4,5,6,7]);
    assert_row(&buf, w, 6, &[]);
    assert_row(&buf, w, 7, &[]);
}

#[test]
fn fill_color_is_injectable() {
    init();
    let (w, h) = (10usize, 7usize);
    let mut ras = RasterizerRegion::new(w, h);
    ras.begin_path(5.0, 1.0);
    ras.line_to(8.0, 2.0);
    ras.line_to(5.0, 5.0);
    ras.line_to(2.0, 2.0);
    ras.close_path();

    let red = Rgba8::new(255, 0, 0, 255);
    let mut buf = vec![0u8; w * h * 4];
    {
        let mut pixf = SliceMem::new(&mut buf, w, h);
        render_region(&ras.region, &mut pixf, red);
    }
    let i = (3 * w + 5) * 4;
    assert_eq!(&buf[i .. i+4], &[255, 0, 0, 255]);
}
