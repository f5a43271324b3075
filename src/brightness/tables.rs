//! Level-to-duty lookup tables, one per physical channel.
//!
//! Both tables map a perceptual level (0..=255) to a 12-bit duty value
//! and are monotonically non-decreasing. The cool channel is capped lower
//! than the warm one so the two LED strings match in perceived brightness.

/// Duty values for the warm channel (PWM output 0).
#[rustfmt::skip]
pub static WARM_TABLE: [u16; 256] = [
    200, 310, 311, 312, 313, 314, 315, 316, 316, 317, 318, 319,
    320, 321, 322, 323, 324, 325, 326, 327, 328, 328, 329, 330,
    331, 332, 333, 334, 335, 336, 337, 338, 339, 340, 340, 341,
    342, 343, 344, 345, 346, 347, 348, 349, 350, 351, 351, 352,
    353, 354, 355, 356, 357, 358, 359, 360, 361, 362, 363, 363,
    364, 365, 366, 367, 368, 369, 370, 374, 377, 381, 385, 388,
    392, 396, 400, 403, 407, 411, 414, 418, 422, 425, 429, 433,
    436, 440, 444, 448, 451, 455, 459, 462, 466, 470, 473, 477,
    481, 484, 488, 492, 496, 499, 503, 507, 510, 514, 518, 521,
    525, 529, 533, 536, 540, 544, 547, 551, 555, 558, 562, 566,
    569, 573, 577, 581, 584, 588, 592, 595, 599, 600, 614, 627,
    641, 655, 668, 682, 696, 710, 723, 737, 751, 764, 778, 792,
    805, 819, 833, 846, 860, 874, 888, 901, 915, 929, 942, 956,
    970, 983, 997, 1011, 1024, 1038, 1052, 1066, 1079, 1093, 1107, 1120,
    1134, 1148, 1161, 1175, 1189, 1203, 1216, 1230, 1244, 1257, 1271, 1285,
    1298, 1312, 1326, 1339, 1353, 1367, 1381, 1394, 1408, 1422, 1435, 1449,
    1450, 1493, 1535, 1578, 1621, 1663, 1706, 1749, 1791, 1834, 1876, 1919,
    1962, 2004, 2047, 2090, 2132, 2175, 2218, 2260, 2303, 2346, 2388, 2431,
    2473, 2516, 2559, 2601, 2644, 2687, 2729, 2772, 2815, 2857, 2900, 2943,
    2985, 3028, 3071, 3113, 3156, 3198, 3241, 3284, 3326, 3369, 3412, 3454,
    3497, 3540, 3582, 3625, 3668, 3710, 3753, 3795, 3838, 3881, 3923, 3966,
    4009, 4051, 4094, 4095,
];

/// Duty values for the cool channel (PWM output 1).
#[rustfmt::skip]
pub static COOL_TABLE: [u16; 256] = [
    200, 310, 311, 311, 312, 312, 313, 314, 314, 315, 315, 316,
    317, 317, 318, 319, 319, 320, 320, 321, 322, 322, 323, 323,
    324, 325, 325, 326, 326, 327, 328, 328, 329, 330, 330, 331,
    331, 332, 333, 333, 334, 334, 335, 336, 336, 337, 337, 338,
    339, 339, 340, 340, 341, 342, 342, 343, 344, 344, 345, 345,
    346, 347, 347, 348, 348, 349, 350, 352, 353, 355, 356, 358,
    360, 361, 363, 364, 366, 368, 369, 371, 372, 374, 376, 377,
    379, 380, 382, 384, 385, 387, 388, 390, 392, 393, 395, 396,
    398, 400, 401, 403, 404, 406, 407, 409, 411, 412, 414, 415,
    417, 419, 420, 422, 423, 425, 427, 428, 430, 431, 433, 435,
    436, 438, 439, 441, 443, 444, 446, 447, 449, 450, 453, 456,
    460, 463, 466, 469, 472, 476, 479, 482, 485, 489, 492, 495,
    498, 501, 505, 508, 511, 514, 517, 521, 524, 527, 530, 533,
    537, 540, 543, 546, 550, 553, 556, 559, 562, 566, 569, 572,
    575, 578, 582, 585, 588, 591, 594, 598, 601, 604, 607, 610,
    614, 617, 620, 623, 627, 630, 633, 636, 639, 643, 646, 649,
    650, 678, 706, 734, 763, 791, 819, 847, 875, 903, 931, 959,
    988, 1016, 1044, 1072, 1100, 1128, 1156, 1184, 1213, 1241, 1269, 1297,
    1325, 1353, 1381, 1409, 1438, 1466, 1494, 1522, 1550, 1578, 1606, 1635,
    1663, 1691, 1719, 1747, 1775, 1803, 1831, 1860, 1888, 1916, 1944, 1972,
    2000, 2028, 2056, 2085, 2113, 2141, 2169, 2197, 2225, 2253, 2281, 2310,
    2338, 2366, 2394, 2395,
];
