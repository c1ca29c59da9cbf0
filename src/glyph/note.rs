use crate::{
    foundation::core::{Affine, Rect, Rgba8},
    glyph::{notehead::NoteHead, stem::NoteStem},
    scene::{
        node::{Group, Node, Recolor},
        place::{Dir, Placement},
    },
};

/// How far the stem is pushed up through the head, in multiples of the head size.
pub const STEM_PIERCE: f64 = 2.0 / 3.0;

/// Notehead with an optional stem.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    head: NoteHead,
    stem: Option<NoteStem>,
}

impl Note {
    pub fn new(size: f64, open_head: bool, stem: bool, color: Rgba8) -> Self {
        let head = NoteHead::new(size, open_head, color);
        let stem = stem.then(|| {
            let mut s = NoteStem::new(size, color);
            s.align_to(head.bounds(), Dir::DR)
                .shift(Dir::UP.times(STEM_PIERCE * size));
            s
        });
        Self { head, stem }
    }

    pub fn quarter(size: f64, color: Rgba8) -> Self {
        Self::new(size, false, true, color)
    }

    pub fn half(size: f64, color: Rgba8) -> Self {
        Self::new(size, true, true, color)
    }

    pub fn whole(size: f64, color: Rgba8) -> Self {
        Self::new(size, true, false, color)
    }

    pub fn head(&self) -> &NoteHead {
        &self.head
    }

    pub fn stem(&self) -> Option<&NoteStem> {
        self.stem.as_ref()
    }

    pub fn to_node(&self) -> Node {
        let mut group = Group::named("note").with(self.head.to_node());
        if let Some(stem) = &self.stem {
            group.push(stem.to_node());
        }
        group.into()
    }
}

impl Placement for Note {
    fn bounds(&self) -> Rect {
        match &self.stem {
            Some(stem) => self.head.bounds().union(stem.bounds()),
            None => self.head.bounds(),
        }
    }

    fn apply_affine(&mut self, affine: Affine) {
        self.head.apply_affine(affine);
        if let Some(stem) = &mut self.stem {
            stem.apply_affine(affine);
        }
    }
}

impl Recolor for Note {
    fn recolor(&mut self, color: Rgba8) {
        self.head.recolor(color);
        if let Some(stem) = &mut self.stem {
            stem.recolor(color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/note.rs"]
mod tests;
