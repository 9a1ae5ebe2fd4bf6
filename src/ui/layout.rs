use ratatui::layout::Rect;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Option<Rect>,
    pub body: Rect,
    pub footer: Option<Rect>,
}

/// Split `area` into header/body/footer. Without chrome the body takes it all.
pub fn layout_regions(area: Rect, chrome: bool) -> Regions {
    if !chrome {
        return Regions {
            header: None,
            body: area,
            footer: None,
        };
    }

    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    Regions {
        header: Some(header),
        body,
        footer: Some(footer),
    }
}

/// Rect of at most `width` x `height` centered horizontally, `top` rows into `area`.
pub fn banner_rect(area: Rect, width: u16, height: u16, top: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height.saturating_sub(top));
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + top.min(area.height),
        width,
        height,
    }
}
