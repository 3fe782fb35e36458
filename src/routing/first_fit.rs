use crate::optical_network::state::NetworkState;

// every wavelength index free on all hops of `route`, ascending
pub fn free_wavelengths<'a>(state:&'a NetworkState,route:&'a [usize]) -> impl Iterator<Item = usize> + 'a {
    (0..state.wavelength_count()).filter(move |w| {
        route.windows(2).all(|pair| state.wavelength_available(pair[0], pair[1], *w))
    })
}

// lowest indexed wavelength free end to end, wavelength continuity included
pub fn first_fit(state:&NetworkState,route:&[usize]) -> Option<usize> {
    if route.len() < 2 {
        return None;
    }
    free_wavelengths(state, route).next()
}
