// Hand-picked locations on the Mandelbrot set, in the order an explorer
// cycles through them. Coordinates are (re, im) in the complex plane.

pub const BUILTIN: [(&str, f64, f64); 29] = [
    ("Seahorse Valley",      -0.743643887037151, 0.131825904205330),
    ("Main Spiral",          -0.160,             1.0405),
    ("Triple Island",         0.274,             0.006),
    ("Minibrot Sanctuary",   -1.749,             0.001),
    ("Nebula Cluster",        0.42,              0.21),
    ("Triple Spiral Valley", -0.75,              0.11),
    ("Celestial Spiral",     -1.25066,           0.3775),
    ("Antennae Spire",        0.282,             0.53),
    ("Elephant Valley",      -0.4,               0.6),
    ("Secondary Minibrot",   -1.77,              0.0),
    ("Mirrored Abyss",       -0.158,            -1.034),
    ("Quad-Spiral Galaxy",    0.355,             0.355),
    ("Deep Seahorse",        -0.77568377,        0.13646737),
    ("Classic Minibrot",     -0.745428,          0.113009),
    ("Starfish Cavern",       0.275,             0.48),
    ("Mandelbrot's Heart",   -0.8,               0.156),
    ("The Main Island",       0.285,             0.01),
    ("The Needle",           -1.401155,          1.79e-8),
    ("The Scepter",          -0.1528,            1.0397),
    ("Southern Island",       0.34,             -0.05),
    ("Seahorse Tail",        -0.748,             0.099),
    ("Spiral Antenna",       -1.11,              0.22),
    ("Eastern Swirl",         0.45,              0.1428),
    ("Lower Mini-Mandel",    -0.59,             -0.66),
    ("Far West Minibrot",    -1.78,              0.0001),
    ("Quad-Spiral",           0.38,              0.32),
    ("Southern Seahorse",    -0.73,             -0.41),
    ("North Star",            0.0,               0.65),
    ("Ghost of Mandelbrot",  -1.94,              0.0),
];
