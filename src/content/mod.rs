pub(crate) mod testimonial;
